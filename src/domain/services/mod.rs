pub mod keyword_codec;
pub mod language_resolver;
