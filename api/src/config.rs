use clap::Parser;

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(short, long, env, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[clap(short, long, env, default_value_t = 7842)]
    pub port: u16,

    #[clap(env, default_value_t = String::from("production"))]
    pub env: String,

    #[clap(long = "db", env)]
    pub database_url: String,

    #[clap(long, env, help = "Base64-encoded key for signing session cookies")]
    pub cookie_key: String,
    #[clap(long, env, default_value_t = String::from("sid"))]
    pub session_cookie_name: String,

    #[clap(
        long,
        env,
        help = "S3 bucket for sponsor logos; a local directory is used when unset"
    )]
    pub logo_s3_bucket: Option<String>,
    #[clap(long, env, default_value_t = String::from("./uploads"))]
    pub logo_local_dir: String,
    #[clap(long, env, help = "Public URL prefix that serves uploaded logos")]
    pub logo_url_base: String,
}
