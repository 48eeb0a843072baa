pub mod curtain;
