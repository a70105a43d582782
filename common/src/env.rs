pub fn get_env_u64(key: &str) -> Option<u64> {
    std::env::var(key)
        .map(|v| {
            v.parse::<u64>()
                .unwrap_or_else(|_| panic!("{} must be a valid number", key))
        })
        .ok()
}
