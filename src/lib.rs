pub mod net;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
