pub mod net;
pub mod report;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
