use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).expect(&format!("{} must be set", var_name))
        });
    };
}

lazy_env_var!(JWT_SECRET);
lazy_env_var!(COOKIE_NAME);
lazy_env_var!(MONGODB_URI);
lazy_env_var!(DB_NAME);
lazy_env_var!(CORS_ALLOWED_ORIGIN);
lazy_env_var!(USER_COL_NAME);
lazy_env_var!(CAR_COL_NAME);
lazy_env_var!(PROPERTY_COL_NAME);
lazy_env_var!(FUEL_LOG_COL_NAME);
lazy_env_var!(WORKER_COL_NAME);
lazy_env_var!(BOOKING_COL_NAME);
lazy_env_var!(COMMISSION_LEVEL_COL_NAME);
lazy_env_var!(TICKET_COL_NAME);
