pub mod gist_client;
pub mod trivia_client;

pub use gist_client::GistClient;
pub use trivia_client::TriviaClient;
