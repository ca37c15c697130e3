mod gate;
mod login;
mod refresh_me;
mod register;
