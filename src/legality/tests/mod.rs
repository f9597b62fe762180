pub mod common;



#[cfg(test)]
mod test_moves;

#[cfg(test)]
mod test_gifts;


#[cfg(test)]
mod test_rules;
