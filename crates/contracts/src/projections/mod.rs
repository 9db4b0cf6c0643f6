pub mod p900_carta;
