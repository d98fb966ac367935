//! The `surveykit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create surveykit.toml
    if std::path::Path::new("surveykit.toml").exists() {
        println!("surveykit.toml already exists, skipping.");
    } else {
        std::fs::write("surveykit.toml", SAMPLE_CONFIG)?;
        println!("Created surveykit.toml");
    }

    // Create example item file and answer sheet
    std::fs::create_dir_all("items")?;
    for (path, content) in [
        ("items/example.toml", EXAMPLE_ITEMS),
        ("answers.toml", EXAMPLE_ANSWERS),
    ] {
        let path = std::path::Path::new(path);
        if path.exists() {
            println!("{} already exists, skipping.", path.display());
        } else {
            std::fs::write(path, content)?;
            println!("Created {}", path.display());
        }
    }

    println!("\nNext steps:");
    println!("  1. Edit items/example.toml with your own questions");
    println!("  2. Run: surveykit validate --items items/example.toml");
    println!("  3. Run: surveykit report --items items --answers answers.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# surveykit configuration

# Added to the 1-based topic position to form each topic group id
static_topic_offset = 0

# Width split evenly between topics in the progress bar
total_width = 100.0
"#;

const EXAMPLE_ITEMS: &str = r#"[[items]]
item_id = 1
topic_key = "exits"
topic_title = "Emergency exits"
question = "Are all emergency exits clearly signposted?"

[[items]]
item_id = 2
topic_key = "exits"
topic_title = "Emergency exits"
question = "Are exit routes free of obstructions?"

[[items]]
item_id = 3
topic_key = "first_aid"
topic_title = "First aid"
question = "Is the first-aid kit fully stocked?"

[[items]]
item_id = 4
topic_key = "first_aid"
topic_title = "First aid"
question = "Is a trained first-aider on every shift?"
"#;

const EXAMPLE_ANSWERS: &str = r#"[[answers]]
item_id = 1
score = 4.0
comment = "Signage in the loading bay is faded"

[[answers]]
item_id = 4
not_applicable = true
"#;
