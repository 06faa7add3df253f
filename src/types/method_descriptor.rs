//! Non-generic JVM method descriptors.

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{Descriptor, field_type::FieldType};

/// The descriptor of a method.
/// Consists of the parameters types and the return type.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct MethodDescriptor {
    /// The type of the parameters.
    pub parameters_types: Vec<FieldType>,
    /// The return type.
    pub return_type: ReturnType,
}

/// Denotes the return type of a method.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ReturnType {
    /// The method returns a specific type.
    Some(FieldType),
    /// The return type of the method is `void`.
    Void,
}

impl ReturnType {
    /// The descriptor of `void`.
    pub const VOID_DESCRIPTOR: char = 'V';
}

impl Descriptor for ReturnType {
    fn descriptor(&self) -> String {
        match self {
            ReturnType::Some(it) => it.descriptor(),
            ReturnType::Void => Self::VOID_DESCRIPTOR.to_string(),
        }
    }
}

impl Descriptor for MethodDescriptor {
    fn descriptor(&self) -> String {
        format!(
            "({}){}",
            self.parameters_types
                .iter()
                .map(Descriptor::descriptor)
                .join(""),
            self.return_type.descriptor()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    use crate::{tests::arb_field_type, types::field_type::PrimitiveType};

    const MAX_PARAMS: usize = 10;

    fn arb_return_type() -> impl Strategy<Value = ReturnType> {
        prop_oneof![
            Just(ReturnType::Void),
            arb_field_type().prop_map(ReturnType::Some),
        ]
    }

    proptest! {
        #[test]
        fn params_precede_return_type(
            params in prop::collection::vec(arb_field_type(), 0..MAX_PARAMS),
            ret in arb_return_type(),
        ) {
            let descriptor = MethodDescriptor {
                parameters_types: params.clone(),
                return_type: ret.clone(),
            }
            .descriptor();
            let expected_params: String = params.iter().map(Descriptor::descriptor).collect();
            assert_eq!(descriptor, format!("({expected_params}){}", ret.descriptor()));
        }
    }

    #[test]
    fn no_params_void() {
        let descriptor = MethodDescriptor {
            parameters_types: Vec::new(),
            return_type: ReturnType::Void,
        };
        assert_eq!(descriptor.descriptor(), "()V");
    }

    #[test]
    fn primitive_params() {
        let descriptor = MethodDescriptor {
            parameters_types: vec![
                FieldType::Base(PrimitiveType::Int),
                FieldType::array_of(FieldType::Base(PrimitiveType::Char), 2),
            ],
            return_type: ReturnType::Some(FieldType::Base(PrimitiveType::Long)),
        };
        assert_eq!(descriptor.descriptor(), "(I[[C)J");
    }
}
