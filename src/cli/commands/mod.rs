pub mod completions;
pub mod decode;
pub mod decrypt;
pub mod encode;
pub mod encrypt;
pub mod fingerprint;
pub mod inspect;
pub mod keygen;
pub mod open;
pub mod pack;
pub mod random;
pub mod seal;
pub mod unpack;
