mod health;
mod login;
