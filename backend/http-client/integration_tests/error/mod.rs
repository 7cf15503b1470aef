mod client_error;
