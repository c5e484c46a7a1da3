use bencode_gen_core::{ScalarKind, TypeDesc, TypeId, TypeTable};
use bencode_gen_plan::EmptinessTest;

/// Test an omitempty field uses, chosen from its underlying type.
///
/// `None` means the type has no empty value (structs, opaque native types).
pub fn emptiness_test(table: &TypeTable, ty: TypeId) -> Option<EmptinessTest> {
    match table.get(table.underlying(ty)) {
        TypeDesc::Sequence { .. } | TypeDesc::Mapping { .. } => Some(EmptinessTest::Len),
        TypeDesc::Scalar(ScalarKind::Str) => Some(EmptinessTest::Len),
        TypeDesc::Pointer(_) => Some(EmptinessTest::Nil),
        TypeDesc::Scalar(ScalarKind::Bool) => Some(EmptinessTest::False),
        TypeDesc::Scalar(ScalarKind::Int(_) | ScalarKind::Float(_)) => Some(EmptinessTest::Zero),
        TypeDesc::Duration => Some(EmptinessTest::ZeroDuration),
        TypeDesc::Struct(_) | TypeDesc::Named(_) | TypeDesc::Native(_) => None,
    }
}
