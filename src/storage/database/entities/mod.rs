/// Post entity module
pub mod post;
/// Todo entity module
pub mod todo;
/// User entity module
pub mod user;

pub use post::Entity as Post;
pub use todo::Entity as Todo;
pub use user::Entity as User;
