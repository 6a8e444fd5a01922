use bytefeed_corelib::funnel::{
    BytesFunnel, IntegerFunnel, LongFunnel, SequentialFunnel, UnencodedCharsFunnel, Utf8Funnel,
};
use bytefeed_corelib::{ByteSinkAdapter, Funnel, PrimitiveSink, PutError};

struct Person {
    id: i64,
    name: String,
    scores: Vec<i32>,
}

struct PersonFunnel;

impl Funnel<Person> for PersonFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, p: &Person, into: &mut S) -> Result<(), PutError> {
        into.put_long(p.id)
            .put_int(p.name.len() as i32)
            .put_str(&p.name);
        into.put_object(&p.scores[..], &SequentialFunnel(IntegerFunnel))?;
        Ok(())
    }
}

fn recorded<F: FnOnce(&mut ByteSinkAdapter<Vec<u8>>)>(f: F) -> Vec<u8> {
    let mut a = ByteSinkAdapter::new(Vec::new());
    f(&mut a);
    a.into_inner()
}

#[test]
fn nested_funnel_equals_direct_calls() {
    let p = Person {
        id: 9,
        name: "ada".into(),
        scores: vec![5, -5],
    };
    let funneled = recorded(|a| {
        a.put_object(&p, &PersonFunnel).unwrap();
    });
    let direct = recorded(|a| {
        a.put_long(9).put_int(3).put_str("ada").put_int(5).put_int(-5);
    });
    assert_eq!(funneled, direct);
}

#[test]
fn standard_funnels_match_their_puts() {
    assert_eq!(
        recorded(|a| {
            a.put_object(&[1u8, 2][..], &BytesFunnel).unwrap();
        }),
        vec![1, 2]
    );
    assert_eq!(
        recorded(|a| {
            a.put_object(&-2i64, &LongFunnel).unwrap();
        }),
        recorded(|a| {
            a.put_long(-2);
        })
    );
    assert_eq!(
        recorded(|a| {
            a.put_object("∂", &UnencodedCharsFunnel).unwrap();
        }),
        recorded(|a| {
            a.put_char('∂');
        })
    );
    assert_eq!(
        recorded(|a| {
            a.put_object("∂", &Utf8Funnel).unwrap();
        }),
        "∂".as_bytes()
    );
}

#[test]
fn put_object_chains() {
    let bytes = recorded(|a| {
        a.put_object(&1i32, &IntegerFunnel).unwrap().put_byte(0xff);
    });
    assert_eq!(bytes, vec![1, 0, 0, 0, 0xff]);
}
