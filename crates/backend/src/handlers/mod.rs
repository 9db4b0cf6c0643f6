pub mod a001_dish;
