pub mod contacts_http;
