mod cylinder;
mod point;
mod ray;
mod spectrum;
mod tube;
