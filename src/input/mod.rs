pub mod command_line;
pub mod game_tree;
