//! Well-known names shared by the credentials file format.

/// Section that holds the copy of the active profile
pub const DEFAULT_SECTION: &str = "default";

/// Access key id entry
pub const ACCESS_KEY_ID: &str = "aws_access_key_id";

/// Secret access key entry
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

/// Optional session token entry
pub const SESSION_TOKEN: &str = "aws_session_token";

/// Extension given to the single-generation backup file
pub const BACKUP_EXTENSION: &str = "bak";

/// Environment variable that relocates the shared credentials file
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";
