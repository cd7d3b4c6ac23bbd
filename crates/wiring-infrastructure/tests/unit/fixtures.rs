//! Small object graphs exercised by the DI tests

#![allow(dead_code)]

use std::sync::Arc;
use wiring_domain::error::Error;
use wiring_infrastructure::di::{Constructor, Injectable};
use wiring_infrastructure::implements;

/// Unwrap the error of a resolution that must fail
pub fn expect_err<T: ?Sized>(result: Result<Arc<T>, Error>) -> Error {
    match result {
        Ok(_) => panic!("expected resolution to fail"),
        Err(e) => e,
    }
}

// ----------------------------------------------------------------------------
// A -> B -> C chain
// ----------------------------------------------------------------------------

pub trait Ia: Send + Sync {
    fn label(&self) -> &'static str;
    fn b(&self) -> Arc<dyn Ib>;
}

pub trait Ib: Send + Sync {
    fn label(&self) -> &'static str;
    fn c(&self) -> Arc<dyn Ic>;
}

pub trait Ic: Send + Sync {
    fn label(&self) -> &'static str;
}

pub struct A {
    pub b: Arc<dyn Ib>,
}

impl Ia for A {
    fn label(&self) -> &'static str {
        "A"
    }

    fn b(&self) -> Arc<dyn Ib> {
        Arc::clone(&self.b)
    }
}

impl Injectable for A {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ib>()
            .build(|args| Ok(A { b: args.next::<dyn Ib>()? }))]
    }
}

pub struct B {
    pub c: Arc<dyn Ic>,
}

impl Ib for B {
    fn label(&self) -> &'static str {
        "B"
    }

    fn c(&self) -> Arc<dyn Ic> {
        Arc::clone(&self.c)
    }
}

impl Injectable for B {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ic>()
            .build(|args| Ok(B { c: args.next::<dyn Ic>()? }))]
    }
}

#[derive(Debug)]
pub struct C;

impl Ic for C {
    fn label(&self) -> &'static str {
        "C"
    }
}

impl Injectable for C {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(|| C)]
    }
}

#[derive(Debug)]
pub struct OtherC;

impl Ic for OtherC {
    fn label(&self) -> &'static str {
        "OtherC"
    }
}

impl Injectable for OtherC {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(|| OtherC)]
    }
}

implements!(dyn Ia => A);
implements!(dyn Ib => B);
implements!(dyn Ic => C, OtherC);

// ----------------------------------------------------------------------------
// Cycles
// ----------------------------------------------------------------------------

pub trait Mirror: Send + Sync {}

/// Needs the contract it is bound to
pub struct Narcissus {
    _reflection: Arc<dyn Mirror>,
}

impl Mirror for Narcissus {}

impl Injectable for Narcissus {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Mirror>()
            .build(|args| {
                Ok(Narcissus {
                    _reflection: args.next::<dyn Mirror>()?,
                })
            })]
    }
}

pub trait Ping: Send + Sync {}

pub trait Pong: Send + Sync {}

pub struct PingImpl {
    _pong: Arc<dyn Pong>,
}

impl Ping for PingImpl {}

impl Injectable for PingImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Pong>()
            .build(|args| {
                Ok(PingImpl {
                    _pong: args.next::<dyn Pong>()?,
                })
            })]
    }
}

pub struct PongImpl {
    _ping: Arc<dyn Ping>,
}

impl Pong for PongImpl {}

impl Injectable for PongImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ping>()
            .build(|args| {
                Ok(PongImpl {
                    _ping: args.next::<dyn Ping>()?,
                })
            })]
    }
}

/// Concrete type needing itself, no registry involved
pub struct Ouroboros {
    _tail: Arc<Ouroboros>,
}

impl Injectable for Ouroboros {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .concrete::<Ouroboros>()
            .build(|args| {
                Ok(Ouroboros {
                    _tail: args.next::<Ouroboros>()?,
                })
            })]
    }
}

implements!(dyn Mirror => Narcissus);
implements!(dyn Ping => PingImpl);
implements!(dyn Pong => PongImpl);

// ----------------------------------------------------------------------------
// Constructor selection
// ----------------------------------------------------------------------------

/// Zero and two parameter constructors
pub struct Rich {
    pub used: &'static str,
    pub c: Option<Arc<dyn Ic>>,
    pub concrete: Option<Arc<C>>,
}

impl Injectable for Rich {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::nullary(|| Rich {
                used: "empty",
                c: None,
                concrete: None,
            }),
            Constructor::builder()
                .contract::<dyn Ic>()
                .concrete::<C>()
                .build(|args| {
                    Ok(Rich {
                        used: "full",
                        c: Some(args.next::<dyn Ic>()?),
                        concrete: Some(args.next::<C>()?),
                    })
                }),
        ]
    }
}

/// Two constructors of equal arity
pub struct Tied {
    pub used: &'static str,
}

impl Injectable for Tied {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::builder()
                .concrete::<C>()
                .build(|_| Ok(Tied { used: "first" })),
            Constructor::builder()
                .concrete::<OtherC>()
                .build(|_| Ok(Tied { used: "second" })),
        ]
    }
}

// ----------------------------------------------------------------------------
// Failures
// ----------------------------------------------------------------------------

/// Declares no constructor at all
pub struct Sealed;

impl Ic for Sealed {
    fn label(&self) -> &'static str {
        "Sealed"
    }
}

impl Injectable for Sealed {
    fn constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }
}

/// Constructor body that fails
pub struct Faulty;

impl Ic for Faulty {
    fn label(&self) -> &'static str {
        "Faulty"
    }
}

impl Injectable for Faulty {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder().build(|_| Err("disk on fire".into()))]
    }
}

implements!(dyn Ic => Sealed, Faulty);

/// Depends on a type whose constructor fails
pub struct NeedsFaulty {
    _c: Arc<dyn Ic>,
}

impl Injectable for NeedsFaulty {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ic>()
            .build(|args| {
                Ok(NeedsFaulty {
                    _c: args.next::<dyn Ic>()?,
                })
            })]
    }
}

/// Declares `dyn Ic` but asks for `dyn Ib`
pub struct Confused;

impl Injectable for Confused {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ic>()
            .build(|args| {
                let _b = args.next::<dyn Ib>()?;
                Ok(Confused)
            })]
    }
}

/// Asks for an argument it never declared
pub struct Greedy;

impl Injectable for Greedy {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder().build(|args| {
            let _c = args.next::<dyn Ic>()?;
            Ok(Greedy)
        })]
    }
}

// ----------------------------------------------------------------------------
// Diamond
// ----------------------------------------------------------------------------

pub struct Left {
    pub c: Arc<dyn Ic>,
}

impl Injectable for Left {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ic>()
            .build(|args| Ok(Left { c: args.next::<dyn Ic>()? }))]
    }
}

pub struct Right {
    pub c: Arc<dyn Ic>,
}

impl Injectable for Right {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn Ic>()
            .build(|args| Ok(Right { c: args.next::<dyn Ic>()? }))]
    }
}

pub struct Top {
    pub left: Arc<Left>,
    pub right: Arc<Right>,
}

impl Injectable for Top {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .concrete::<Left>()
            .concrete::<Right>()
            .build(|args| {
                Ok(Top {
                    left: args.next::<Left>()?,
                    right: args.next::<Right>()?,
                })
            })]
    }
}
