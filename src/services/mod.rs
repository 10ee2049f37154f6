pub mod identity;
pub mod jwt;
pub mod quota;
pub mod rate_limit;
pub mod revocation;
pub mod security;
