pub mod fallback;
pub mod puppies;

pub use fallback::not_found;
pub use puppies::{delete_puppies, get_puppies, get_puppiezzzz, post_puppies, put_puppies};
