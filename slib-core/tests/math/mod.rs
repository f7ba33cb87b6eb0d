mod hash_tests;
mod polynomial_tests;
