mod exercises;
mod health;
mod professors;
mod rate_limiting;
mod registrations;
mod security_headers;
