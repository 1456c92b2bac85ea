mod iam_token_provider;

pub use iam_token_provider::{IBM_IAM_TOKEN_URL, IamError, IamTokenProvider};
