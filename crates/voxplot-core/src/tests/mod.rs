mod endpoints;
mod grid;
mod pie;
mod series;
