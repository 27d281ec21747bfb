// import modules
mod post;
mod comment;

// export modules
pub use post::*;
pub use comment::*;
