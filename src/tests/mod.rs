use proptest::prelude::*;

use crate::{
    jvm::references::ClassRef,
    types::field_type::{FieldType, PrimitiveType},
};

static PRIMITIVE_KEYWORDS: [&str; 9] = [
    "byte", "char", "double", "float", "int", "long", "short", "boolean", "void",
];

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][\w\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..10).prop_map(|v| v.join("/"))
}

/// Identifiers that can name a field or a method, including non-ASCII ones.
pub(crate) fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z_é健][a-zA-Z0-9_$é健]{0,12}")
        .expect("The regex is invalid")
        .prop_filter("Keywords are not identifiers", |it| {
            !PRIMITIVE_KEYWORDS.contains(&it.as_str())
        })
}

pub(crate) fn arb_primitive_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(&PRIMITIVE_KEYWORDS[..8])
}

pub(crate) fn arb_non_array_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(FieldType::Base),
        arb_class_name()
            .prop_map(ClassRef::new)
            .prop_map(FieldType::Object),
    ]
}

prop_compose! {
    fn arb_array_field_type()(
        t in arb_non_array_field_type(),
        dim in 1..=u8::MAX
    ) -> FieldType {
        FieldType::array_of(t, dim)
    }
}

pub(crate) fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![arb_non_array_field_type(), arb_array_field_type()]
}
