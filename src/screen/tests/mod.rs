#[cfg(test)]
pub mod common;

#[cfg(test)]
mod test_lifecycle;


#[cfg(test)]
mod test_action_menu;
