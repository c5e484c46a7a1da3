use crate::instruction::{EmptinessTest, Instruction};
use crate::plan::{Plan, PlanFeatures, combined_features};
use crate::selector::Selector;

fn bool_plan() -> Plan {
    Plan::new(
        "Flags",
        vec![
            Instruction::literal("d"),
            Instruction::literal("7:private"),
            Instruction::literal("i"),
            Instruction::WriteBool(Selector::Root.field("Private")),
            Instruction::literal("e"),
            Instruction::literal("e"),
        ],
    )
}

fn map_plan() -> Plan {
    Plan::new(
        "Index",
        vec![
            Instruction::literal("d"),
            Instruction::Map {
                selector: Selector::Root,
                depth: 0,
                key_cast: None,
                body: vec![Instruction::WriteString(Selector::Key(0))],
            },
            Instruction::literal("e"),
        ],
    )
}

#[test]
fn features_of_literal_only_plan() {
    assert_eq!(bool_plan().features(), PlanFeatures::default());
}

#[test]
fn features_see_nested_instructions() {
    let plan = Plan::new(
        "Deep",
        vec![Instruction::Conditional {
            selector: Selector::Root.field("Ids"),
            test: EmptinessTest::Len,
            body: vec![Instruction::List {
                selector: Selector::Root.field("Ids"),
                depth: 0,
                body: vec![Instruction::WriteInt(Selector::Elem(0))],
            }],
        }],
    );
    assert_eq!(
        plan.features(),
        PlanFeatures {
            needs_sort: false,
            needs_format: true,
        }
    );
}

#[test]
fn map_needs_sort_and_format() {
    let features = map_plan().features();
    assert!(features.needs_sort);
    assert!(features.needs_format);
}

#[test]
fn combined_features_union() {
    let plans = [bool_plan(), map_plan()];
    let features = combined_features(&plans);
    assert!(features.needs_sort && features.needs_format);
    assert_eq!(combined_features(&[] as &[Plan]), PlanFeatures::default());
}

#[test]
fn folded_plan_keeps_name() {
    let plan = bool_plan().folded();
    assert_eq!(plan.name, "Flags");
    assert_eq!(plan.literal_count(), 2);
    assert_eq!(plan.instructions[0], Instruction::literal("d7:privatei"));
}
