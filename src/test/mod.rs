mod network;
mod viz;
