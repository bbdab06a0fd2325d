//! Per-resource `build_*` / `parse_*` pairs on `TwitterApiClient`, and the
//! async handles `TwitterApi` hands out for each resource.

mod account;
mod communities;
mod lists;
mod spaces;
mod stream;
mod trends;
mod tweets;
mod users;

pub use account::AccountApi;
pub use communities::CommunitiesApi;
pub use lists::ListsApi;
pub use spaces::SpacesApi;
pub use stream::StreamApi;
pub use trends::TrendsApi;
pub use tweets::TweetsApi;
pub use users::UsersApi;
