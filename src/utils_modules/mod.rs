pub mod io_utils;
pub mod logger_utils;
pub mod multipart_encoder;
pub mod time_utils;
