use crate::commands::CmdResult;
use crate::model::Component;

/// Every component that can be scaffolded, in display order.
pub fn run() -> CmdResult {
    CmdResult::default().with_components(Component::ALL.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_components_in_order() {
        let result = run();
        assert_eq!(result.components.len(), 13);
        assert_eq!(result.components[0], Component::Entity);
        assert_eq!(result.components[12], Component::DeviceCondition);
        assert!(result.messages.is_empty());
    }
}
