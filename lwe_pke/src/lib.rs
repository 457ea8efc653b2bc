#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! A public-key encryption scheme based on the Learning with Errors (LWE) problem.
//!
//! Messages are encrypted bit by bit: every bit becomes one [`Ciphertext`] `(u, v)`,
//! and byte streams are handled by encrypting the eight bits of each byte,
//! least-significant bit first.
//!
//! ```
//! use lwe_pke::{Engine, TOY_PARAMETERS};
//!
//! let mut rng = rand::thread_rng();
//! let engine = Engine::new(TOY_PARAMETERS).unwrap();
//! let (pk, sk) = engine.generate_keypair(&mut rng);
//!
//! let ciphertexts = engine.encrypt_bytes(b"Hi!", &pk, &mut rng).unwrap();
//! assert_eq!(ciphertexts.len(), 24);
//! assert_eq!(engine.decrypt_bytes(&ciphertexts, &sk).unwrap(), b"Hi!");
//! ```
//!
//! # Warning
//!
//! This implementation is not constant time and gives no protection
//! against side-channel attacks.

mod error;
mod parameter;

mod ciphertext;
mod public_key;
mod secret_key;

mod codec;
mod engine;
mod key_gen;

pub use error::{ErrorKind, PkeError};
pub use parameter::{
    decode_bit, encode_bit, LweParameters, SecurityParameters, DEFAULT_PARAMETERS, MIN_MODULUS,
    TOY_PARAMETERS,
};

pub use ciphertext::Ciphertext;
pub use public_key::PublicKey;
pub use secret_key::{LweSecretKeyType, PrivateKey};

pub use codec::BITS_PER_BYTE;
pub use engine::Engine;
pub use key_gen::KeyGen;
