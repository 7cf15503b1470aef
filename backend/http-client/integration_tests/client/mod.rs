mod completion;
mod scenarios;
