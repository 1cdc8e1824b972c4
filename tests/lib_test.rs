//! Library integration tests.

use item_control::ItemControlError;

#[test]
fn error_types_are_public() {
    let err = ItemControlError::UnknownItem {
        prefab: "SwordBronze".into(),
    };
    assert!(err.to_string().contains("SwordBronze"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> item_control::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use item_control::cli::{Cli, Commands};

    let cli = Cli::parse_from(["item-control", "check", "--json"]);

    if let Commands::Check(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn skill_ids_are_public() {
    use item_control::skills::{dynamic_skill_id, SkillId, SkillType};

    assert_eq!(SkillId::from(SkillType::Swords), SkillId(1));
    assert_eq!(dynamic_skill_id("custom_skill"), Some(SkillId(1248346664)));
}
