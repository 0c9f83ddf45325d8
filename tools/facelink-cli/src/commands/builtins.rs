//! List the built-in condition catalog.

use facelink_actions::builtin;

pub fn run() -> anyhow::Result<()> {
    println!("Built-in conditions:");
    for name in builtin::NAMES {
        let Some(condition) = builtin::by_name(name, None) else {
            continue;
        };
        let mut inputs = Vec::new();
        if condition.uses_face() {
            inputs.push("face");
        }
        if condition.uses_hand() {
            inputs.push("hand");
        }
        println!("  {name:<18} {}", inputs.join("+"));
    }
    println!();
    println!(
        "Defaults: expression threshold {}, gesture confidence {}",
        builtin::DEFAULT_EXPRESSION_THRESHOLD,
        builtin::DEFAULT_GESTURE_CONFIDENCE
    );
    Ok(())
}
