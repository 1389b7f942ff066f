mod dynamics;
mod extract;
mod frames;
