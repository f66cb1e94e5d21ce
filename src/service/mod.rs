//! TodoService: typed CRUD over the todo_items table.

mod todos;

pub use todos::TodoService;
