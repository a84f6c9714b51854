pub mod aggregate;
pub mod encoding;

pub use aggregate::AggregateKind;
pub use encoding::{
    aggregate_encoding, encoding_to_type, filter_encoding, method_argument_encodings,
    needs_resolving, return_encoding, strip_template_args, tokenize,
};
