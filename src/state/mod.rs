pub mod favorites;
pub mod profile;
pub mod reviews;

pub use favorites::{load_favorites, toggle_favorite};
pub use profile::{clear_saved_data, load_user, save_user, UserProfile};
pub use reviews::{increment_review_count, load_review_count};
