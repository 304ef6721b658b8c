pub struct AuthServiceConfig {
    /// bcrypt cost used when hashing new passwords
    pub password_hash_cost: u32,
}
