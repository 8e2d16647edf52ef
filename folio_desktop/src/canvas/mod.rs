mod globe_network;
mod swarm_field;

pub use globe_network::GlobeNetworkCanvas;
pub use swarm_field::SwarmFieldCanvas;
