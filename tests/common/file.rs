use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct ConfigSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_config(config: &ConfigSpec) {
    if let Some(parent) = config.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&config.path, &config.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", config.path, e));
}

pub fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read output {:?}: {}", path, e))
}

/// A router configuration with one interface per description
pub fn router_config(hostname: &str, descriptions: &[String]) -> String {
    let mut config = format!("hostname {}\n", hostname);

    for (i, description) in descriptions.iter().enumerate() {
        config.push_str(&format!(
            "interface GigabitEthernet0/{}\n description {}\n no shutdown\n",
            i, description
        ));
    }
    config.push_str("line vty 0 4\n transport input ssh\n");

    config
}

pub fn generated_descriptions(count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    (0..count)
        .map(|_| Words(2..5).fake::<Vec<String>>().join(" "))
        .collect()
}
