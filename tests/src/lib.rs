//! This module contains the AST construction tests
