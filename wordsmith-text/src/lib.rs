//! Wordsmith Text Functions Plugin
//!
//! String validation and manipulation functions, the prettify pipeline and the
//! Roman numeral codec. Every function has a typed form in its module and a
//! plugin form that follows the never-panic philosophy and returns
//! `Value::Error` on failure.

mod helpers;
mod error;
pub mod patterns;
pub mod validate;
pub mod manipulate;
pub mod compress;
pub mod generate;
pub mod vault;
pub mod prettify;
pub mod roman;
pub mod range;

pub use error::TextError;
pub use prettify::prettify;
pub use range::{roman_range, RangeArgs, RomanRange};
pub use vault::Vault;

use wordsmith_plugin::PluginRegistry;

/// Load text functions into registry
pub fn load_text_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Validate (24 functions)
        .with_function(validate::IsString)
        .with_function(validate::IsFullString)
        .with_function(validate::IsNumber)
        .with_function(validate::IsInteger)
        .with_function(validate::IsDecimal)
        .with_function(validate::IsUrl)
        .with_function(validate::IsEmail)
        .with_function(validate::IsCreditCard)
        .with_function(validate::IsCamelCase)
        .with_function(validate::IsSnakeCase)
        .with_function(validate::IsJson)
        .with_function(validate::IsUuid)
        .with_function(validate::IsIpV4)
        .with_function(validate::IsIpV6)
        .with_function(validate::IsIp)
        .with_function(validate::IsIsbn10)
        .with_function(validate::IsIsbn13)
        .with_function(validate::IsIsbn)
        .with_function(validate::IsPalindrome)
        .with_function(validate::IsPangram)
        .with_function(validate::IsIsogram)
        .with_function(validate::IsSlug)
        .with_function(validate::ContainsHtml)
        .with_function(validate::WordsCount)

        // Manipulate (10 functions)
        .with_function(manipulate::Reverse)
        .with_function(manipulate::CamelCaseToSnake)
        .with_function(manipulate::SnakeCaseToCamel)
        .with_function(manipulate::Shuffle)
        .with_function(manipulate::StripHtml)
        .with_function(manipulate::Slugify)
        .with_function(manipulate::Booleanize)
        .with_function(manipulate::StripMargin)
        .with_function(manipulate::Asciify)
        .with_function(prettify::Prettify)

        // Roman numerals (3 functions)
        .with_function(roman::RomanEncode)
        .with_function(roman::RomanDecode)
        .with_function(range::RomanRangeFn)

        // Compress (2 functions)
        .with_function(compress::Compress)
        .with_function(compress::Decompress)

        // Generate (3 functions)
        .with_function(generate::UuidFn)
        .with_function(generate::RandomString)
        .with_function(generate::SecureRandomHex)
}
