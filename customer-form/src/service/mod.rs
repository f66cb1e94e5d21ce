//! CustomerService: typed CRUD over the customers table.

mod customers;

pub use customers::CustomerService;
