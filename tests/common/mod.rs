use std::fs;
use std::path::Path;

pub fn generate_random_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S%f").to_string();
    format!("test_log_{}.log", timestamp)
}

pub fn delete_file_if_exists(file_path: &str) {
    let path = Path::new(file_path);
    if path.exists() {
        fs::remove_file(path).unwrap_or_else(|err| {
            eprintln!("Failed to delete file {}: {}", file_path, err);
        });
    }
}

pub fn read_log_lines(file_path: &str) -> Vec<String> {
    fs::read_to_string(file_path)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
