pub mod cache_codec;
pub mod redis_cache_adapter;
