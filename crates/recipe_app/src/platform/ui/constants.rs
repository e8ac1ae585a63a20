pub const PROMPT: &str = "recipe> ";
pub const TITLE: &str = "Food Recipe";
pub const HEADING_CATALOG: &str = "Meals";
pub const HEADING_RECOMMENDED: &str = "Recommended";
pub const HEADING_INGREDIENTS: &str = "Ingredients:";
pub const HEADING_INSTRUCTIONS: &str = "Instructions:";
pub const LOADING_TEXT: &str = "Loading...";
pub const HELP_TEXT: &str = "\
Commands:
  search <meal name>   search for a meal (plain text also searches)
  view <meal id>       show a recipe from the lists
  help                 show this help
  quit                 exit";
