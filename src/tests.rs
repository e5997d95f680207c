use indexmap::IndexMap;
use std::error::Error as _;
use swizzle::{
    Access, Assign, Companion, Lookup, Options, ResultKind, StaticLookup, Swizzle, SwizzleError, Swizzled,
    SwizzledTuple, SwizzledTupleType, Swizzler, swizzledtuple,
};
use test_case::test_case;

#[derive(Debug, Clone, PartialEq)]
struct Vector {
    x: i32,
    y: i32,
    z: i32,
}

impl Lookup for Vector {
    type Value = i32;

    fn lookup(&self, name: &str) -> Option<i32> {
        match name {
            "x" => Some(self.x),
            "y" => Some(self.y),
            "z" => Some(self.z),
            _ => None,
        }
    }

    fn host_name(&self) -> Option<&str> {
        Some("Vector")
    }
}

impl Assign for Vector {
    fn set_field(&mut self, name: &str, value: i32) {
        match name {
            "x" => self.x = value,
            "y" => self.y = value,
            "z" => self.z = value,
            _ => {}
        }
    }
}

impl Swizzle for Vector {
    fn swizzler() -> &'static Swizzler {
        swizzler!(Options::new().writable())
    }
}

fn vector() -> Vector {
    Vector { x: 1, y: 2, z: 3 }
}

/// Host backed by a list of `(name, value)` pairs.
struct Fields<V: 'static>(&'static [(&'static str, V)]);

impl<V: Clone> Lookup for Fields<V> {
    type Value = V;

    fn lookup(&self, name: &str) -> Option<V> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v.clone())
    }
}

fn read<H: Lookup>(options: Options, host: &H, name: &str) -> swizzle::Result<Swizzled<H::Value>> {
    Swizzler::new(options)?.get(host, name)
}

// --- Plain hosts --------------------------------------------------------------

#[test]
fn yzx_swizzle() {
    let v = vector().swizzle("yzx").unwrap();
    assert_eq!(v.as_slice(), [2, 3, 1]);

    let tuple = v.into_tuple().unwrap();
    assert_eq!(tuple.type_name(), "Vector");
    assert_eq!(format!("{tuple:?}"), "Vector(y=2, z=3, x=1)");
}

#[test_case("xyz", [1, 2, 3])]
#[test_case("xzy", [1, 3, 2])]
#[test_case("yxz", [2, 1, 3])]
#[test_case("yzx", [2, 3, 1])]
#[test_case("zxy", [3, 1, 2])]
#[test_case("zyx", [3, 2, 1])]
fn all_three_letter_swizzles(name: &str, expected: [i32; 3]) {
    assert_eq!(vector().swizzle(name).unwrap().as_slice(), expected);
}

#[test]
fn repeated_and_single_fields() {
    assert_eq!(vector().swizzle("xx").unwrap().as_slice(), [1, 1]);
    assert_eq!(vector().swizzle("z").unwrap(), Swizzled::Value(3));
}

#[test]
fn unknown_names_are_unknown_attributes() {
    for name in ["q", "nonexistent_attribute", "xqz", ""] {
        let err = vector().swizzle(name).unwrap_err();
        assert!(err.is_unknown_attribute(), "{name}: {err:?}");
    }
    // the strategy-level reason travels as the error source
    assert!(vector().swizzle("xq").unwrap_err().source().is_some());
}

#[test]
fn results_can_be_swizzled_again() {
    let yzx = vector().swizzle("yzx").unwrap().into_tuple().unwrap();
    assert_eq!(yzx.field("x"), Some(&1));
    assert_eq!(yzx.swizzle("zz").unwrap().as_slice(), [3, 3]);

    // tuples are hosts too
    let swizzler = Swizzler::new(Options::default()).unwrap();
    assert_eq!(swizzler.get(&yzx, "xy").unwrap().as_slice(), [1, 2]);
}

#[test]
fn plain_results_and_type_names() {
    let plain = read(Options::new().result(ResultKind::Plain), &vector(), "yzx").unwrap();
    assert_eq!(plain, Swizzled::Plain(vec![2, 3, 1].into_boxed_slice()));

    let named = read(Options::new().type_name("Swizzled"), &vector(), "xy").unwrap().into_tuple().unwrap();
    assert_eq!(named.type_name(), "Swizzled");

    let anonymous = read(Options::default(), &Fields(&[("a", 10), ("b", 20), ("c", 30)]), "bca").unwrap();
    assert_eq!(anonymous.as_slice(), [20, 30, 10]);
    assert_eq!(anonymous.into_tuple().unwrap().type_name(), swizzle::DEFAULT_TYPE_NAME);
}

#[test]
fn exact_names_shadow_swizzles() {
    let host = Fields(&[("x", "1"), ("xy", "should not be shadowed")]);
    assert_eq!(read(Options::default(), &host, "xy").unwrap(), Swizzled::Value("should not be shadowed"));
}

#[test]
fn one_field_repeats() {
    let host = Fields(&[("x", 7)]);
    assert_eq!(read(Options::default(), &host, "xx").unwrap().as_slice(), [7, 7]);
}

#[test]
fn reads_without_read_access_are_exact_only() {
    let options = Options::new().access(Access::empty());
    assert_eq!(read(options.clone(), &vector(), "x").unwrap(), Swizzled::Value(1));
    assert!(read(options, &vector(), "xy").unwrap_err().is_unknown_attribute());
}

// --- Separators and whitelists ---------------------------------------------

#[test]
fn width_separator() {
    let host = Fields(&[("a", 0)]);
    let options = Options::new().separator("+1");
    assert_eq!(read(options.clone(), &host, "a").unwrap(), Swizzled::Value(0));
    assert_eq!(read(options.clone(), &host, "aa").unwrap().as_slice(), [0, 0]);
    assert!(read(options, &host, "aabb").unwrap_err().is_unknown_attribute());

    let host = Fields(&[("ab", 1), ("cd", 2)]);
    assert_eq!(read(Options::new().separator("+2"), &host, "cdab").unwrap().as_slice(), [2, 1]);
}

#[test]
fn underscore_separator() {
    let host = Fields(&[("x", 1), ("y", 2), ("z", 3)]);
    assert_eq!(read(Options::new().separator("_"), &host, "x_y_z").unwrap().as_slice(), [1, 2, 3]);
    assert!(read(Options::new().separator("_"), &host, "xy").is_err());
}

#[test]
fn empty_separator_is_rejected() {
    let err = Swizzler::new(Options::new().separator("")).unwrap_err();
    assert_eq!(err, SwizzleError::InvalidSeparator { separator: String::new() });
}

#[test]
fn only_whitelisted_names_swizzle() {
    let host = Fields(&[("x", 10), ("y", 20), ("z", 30)]);
    let only = || Options::new().only(["x", "y"]);

    assert_eq!(read(only(), &host, "xy").unwrap().as_slice(), [10, 20]);
    assert_eq!(read(only(), &host, "yx").unwrap().as_slice(), [20, 10]);
    for name in ["xz", "zy", "xyz"] {
        assert!(read(only(), &host, name).unwrap_err().is_unknown_attribute(), "{name}");
    }
    for (name, value) in [("x", 10), ("y", 20), ("z", 30)] {
        assert_eq!(read(only(), &host, name).unwrap(), Swizzled::Value(value));
    }
}

#[test]
fn only_with_separator() {
    let host = Fields(&[("a", 1), ("b", 2), ("c", 3)]);
    let only = || Options::new().only(["a", "b"]).separator("_");

    assert_eq!(read(only(), &host, "a_b").unwrap().as_slice(), [1, 2]);
    assert_eq!(read(only(), &host, "b_a").unwrap().as_slice(), [2, 1]);
    for name in ["a_c", "c_b", "a_b_c"] {
        assert!(read(only(), &host, name).is_err(), "{name}");
    }
    assert_eq!(read(only(), &host, "c").unwrap(), Swizzled::Value(3));
}

#[test]
fn only_single_name() {
    let host = Fields(&[("a", 99)]);
    let only = || Options::new().only(["a"]);
    assert_eq!(read(only(), &host, "aa").unwrap().as_slice(), [99, 99]);
    assert!(read(only(), &host, "ab").is_err());
    assert!(read(only(), &host, "ba").is_err());
}

// --- Type-level members -----------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X = 1,
    Y = 2,
    Z = 3,
}

impl StaticLookup for Axis {
    type Value = Axis;

    fn lookup_static(name: &str) -> Option<Axis> {
        match name {
            "X" => Some(Axis::X),
            "Y" => Some(Axis::Y),
            "Z" => Some(Axis::Z),
            _ => None,
        }
    }

    fn static_name() -> &'static str {
        "Axis"
    }
}

struct Composites;

impl StaticLookup for Composites {
    type Value = i32;

    fn lookup_static(name: &str) -> Option<i32> {
        let value = match name {
            "x" => 1,
            "y" => 2,
            "z" => 3,
            "xy" => 4,
            "yz" => 5,
            "xz" => 6,
            "xyz" => 7,
            _ => return None,
        };
        Some(value)
    }

    fn static_name() -> &'static str {
        "Composites"
    }
}

#[test]
fn enum_members_swizzle() {
    let out = read(Options::default(), &Companion::<Axis>::new(), "YXZ").unwrap();
    assert_eq!(out.as_slice(), [Axis::Y, Axis::X, Axis::Z]);
    assert_eq!(out.as_slice().iter().map(|a| *a as i32).collect::<Vec<_>>(), [2, 1, 3]);
    assert_eq!(out.into_tuple().unwrap().type_name(), "Axis");
}

#[test]
fn composite_members_prefer_longest_names() {
    let host = Companion::<Composites>::new();
    assert_eq!(read(Options::default(), &host, "xz").unwrap(), Swizzled::Value(6));
    assert_eq!(read(Options::default(), &host, "yz").unwrap(), Swizzled::Value(5));
    assert_eq!(read(Options::default(), &host, "xyyz").unwrap().as_slice(), [4, 5]);
    assert_eq!(read(Options::default(), &host, "xyzx").unwrap().as_slice(), [7, 1]);
}

// --- Write-back -------------------------------------------------------------

#[test]
fn swizzled_assignment() {
    let mut v = vector();
    v.swizzle_set("xy", [10, 20]).unwrap();
    assert_eq!(v, Vector { x: 10, y: 20, z: 3 });

    let err = v.swizzle_set("xy", [1, 2, 3]).unwrap_err();
    assert_eq!(err, SwizzleError::ArityMismatch { target: "xy".into(), expected: 2, got: 3 });

    let err = v.swizzle_set("xx", [10, 11]).unwrap_err();
    assert_eq!(err, SwizzleError::ConflictingAssignment { field: "x".into() });
    assert_eq!(v, Vector { x: 10, y: 20, z: 3 });

    v.swizzle_set("zyx", [3, 2, 1]).unwrap();
    assert_eq!(v, vector());
}

#[test]
fn assignment_needs_write_access() {
    let swizzler = Swizzler::new(Options::default()).unwrap();
    let mut v = vector();
    assert_eq!(swizzler.set(&mut v, "xy", [0, 0]).unwrap_err(), SwizzleError::WriteDisabled);
    assert_eq!(v, vector());
}

// --- Tuple types ------------------------------------------------------------

#[test]
fn basic_tuple() {
    let point = swizzledtuple("Point", "x y z").unwrap();
    let p = point.new([1, 2, 3]).unwrap();
    assert_eq!(p.field("x"), Some(&1));
    assert_eq!(p.swizzle("z").unwrap(), Swizzled::Value(3));
    assert_eq!(format!("{p:?}"), "Point(x=1, y=2, z=3)");
}

#[test]
fn rearranged_fields() {
    let point = SwizzledTupleType::builder("Point", "x y z").arrangement("z x y").build().unwrap();
    let p = point.new([1, 2, 3]).unwrap();
    assert_eq!(p, [3, 1, 2]);
    assert_eq!(format!("{p:?}"), "Point(z=3, x=1, y=2)");
}

#[test]
fn default_values() {
    let point = SwizzledTupleType::builder("Point", "x y z").defaults([0, 0, 0]).build().unwrap();
    let p = point.new([1]).unwrap();
    assert_eq!(p, [1, 0, 0]);
    assert_eq!(p.field("y"), Some(&0));
    assert_eq!(format!("{p:?}"), "Point(x=1, y=0, z=0)");
}

#[test]
fn rename_keywords() {
    let t = SwizzledTupleType::builder("MyTuple", "fn struct x").rename(true).build().unwrap();
    let t = t.new([1, 2, 3]).unwrap();
    assert_eq!(t.field("_0"), Some(&1));
    assert_eq!(t.field("_1"), Some(&2));
    assert_eq!(t.field("x"), Some(&3));
    assert_eq!(format!("{t:?}"), "MyTuple(_0=1, _1=2, x=3)");
}

#[test]
fn invalid_declarations() {
    assert!(matches!(
        swizzledtuple::<i32>("MyTuple", "fn struct x"),
        Err(SwizzleError::InvalidFieldDeclaration { .. })
    ));
    assert!(matches!(swizzledtuple::<i32>("MyTuple", "x y x"), Err(SwizzleError::InvalidFieldDeclaration { .. })));
    assert!(matches!(
        SwizzledTupleType::<i32>::builder("Point", "x y z").arrangement("z y w").build(),
        Err(SwizzleError::ArrangementCoverage { .. })
    ));
}

#[test]
fn replace_as_dict_and_make() {
    let point = swizzledtuple("Point", "x y z").unwrap();
    let p = point.new([1, 2, 3]).unwrap();

    let moved = p.replace([("y", 5)]).unwrap();
    assert_eq!(moved, [1, 5, 3]);
    assert_eq!(moved.field("y"), Some(&5));

    let expected: IndexMap<String, i32> = [("x", 1), ("y", 2), ("z", 3)].map(|(k, v)| (k.to_string(), v)).into();
    assert_eq!(p.as_dict(), expected);
    assert_eq!(point.make([1, 2, 3]).unwrap(), p);
}

#[test]
fn integration() {
    let my = SwizzledTupleType::builder("MyTuple", "x y z")
        .arrangement("z x y z")
        .rename(true)
        .defaults([0, 0, 2])
        .separator("+1")
        .build()
        .unwrap();
    let t = my.new([1]).unwrap();
    assert_eq!(t, [2, 1, 0, 2]);
    assert_eq!(format!("{t:?}"), "MyTuple(z=2, x=1, y=0, z=2)");

    let t = t.replace([("y", 5)]).unwrap();
    assert_eq!(t, [2, 1, 5, 2]);
    let dict = t.as_dict();
    assert_eq!(dict.keys().collect::<Vec<_>>(), ["z", "x", "y"]);
    assert_eq!(dict.values().copied().collect::<Vec<_>>(), [2, 1, 5]);

    assert_eq!(t.swizzle("zy").unwrap().as_slice(), [2, 5]);
}

#[test]
fn separated_tuple_fields() {
    let t = SwizzledTupleType::builder("T", "x y z").separator("_").build().unwrap();
    let swz = t.new([4, 5, 6]).unwrap().swizzle("x_y_z").unwrap().into_tuple().unwrap();
    assert_eq!(swz, [4, 5, 6]);
    assert_eq!(swz.field("z"), Some(&6));
    // the separator carries over to derived tuples
    assert_eq!(swz.swizzle("z_x").unwrap().as_slice(), [6, 4]);

    let t = SwizzledTupleType::builder("T", "x1 x2 y1 y2").separator("_").build().unwrap();
    let val = t.new([1, 2, 3, 4]).unwrap().swizzle("x1_y1").unwrap().into_tuple().unwrap();
    assert_eq!(val, [1, 3]);
    assert_eq!(val.field("y1"), Some(&3));
}

#[test]
fn equal_width_fields_split_by_width() {
    let t = swizzledtuple("T", "x1 x2 y1 y2").unwrap();
    let t = t.new([1, 2, 3, 4]).unwrap();
    assert_eq!(t.swizzle("y2x1").unwrap().as_slice(), [4, 1]);
}

#[test]
fn prefix_ambiguity_takes_longest_match() {
    let t = swizzledtuple("T", "a aa aaa").unwrap().new([1, 2, 3]).unwrap();
    assert_eq!(t.swizzle("aaa").unwrap(), Swizzled::Value(3));
    let swz = t.swizzle("aaaaa").unwrap().into_tuple().unwrap();
    assert_eq!(swz, [3, 2]);
    assert_eq!(swz.field("aaa"), Some(&3));
    assert_eq!(swz.field("aa"), Some(&2));

    let t = swizzledtuple("T", "a aa aaa ab abc abcd").unwrap().new([1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(t.swizzle("aaaaaa").unwrap().as_slice(), [3, 3]);
    assert_eq!(t.swizzle("abcdabcaaaaa").unwrap().as_slice(), [6, 5, 3, 2]);

    let t = swizzledtuple("T", "a ab abc abcd").unwrap().new([1, 2, 3, 4]).unwrap();
    assert_eq!(t.swizzle("abcdabc").unwrap().as_slice(), [4, 3]);
    assert_eq!(t.swizzle("abcab").unwrap().as_slice(), [3, 2]);
}

#[test]
fn greedy_tokenization_does_not_backtrack() {
    let t = swizzledtuple("T", "ab abc cd").unwrap().new([1, 2, 3]).unwrap();
    assert!(t.swizzle("abcd").unwrap_err().is_unknown_attribute());
    assert_eq!(t.swizzle("abcab").unwrap().as_slice(), [2, 1]);
}

#[test]
fn rearranged_overlap() {
    let t = SwizzledTupleType::builder("T", "a aa aaa").arrangement("aaa aa a aaa").build().unwrap();
    let t = t.new([1, 2, 3]).unwrap();
    assert_eq!(t, [3, 2, 1, 3]);
    assert_eq!(t.swizzle("aaaaa").unwrap().as_slice(), [3, 2]);
}

#[test]
fn compound_field_names() {
    let t = SwizzledTupleType::builder("T", "r g b rgb").arrangement("rgb r g b").build().unwrap();
    let t = t.new([10, 20, 30, 999]).unwrap();
    assert_eq!(t.swizzle("rgb").unwrap(), Swizzled::Value(999));
    let swz = t.swizzle("rgbrgb").unwrap().into_tuple().unwrap();
    assert_eq!(swz, [999, 999]);
    assert_eq!(swz.field("rgb"), Some(&999));
}

#[test]
fn invalid_tuple_swizzles() {
    let t = swizzledtuple("T", "x y z").unwrap().new([1, 2, 3]).unwrap();
    assert!(t.swizzle("q").unwrap_err().is_unknown_attribute());
    assert!(t.swizzle("xqz").unwrap_err().is_unknown_attribute());
}

#[test]
fn indexing_and_slicing() {
    let t = swizzledtuple("T", "x y z").unwrap().new([1, 2, 3]).unwrap();
    assert_eq!((t[0], t[1], t[2]), (1, 2, 3));
    assert_eq!(t.slice(0..2), [1, 2]);
    assert_eq!(t.slice(..2), [1, 2]);
    assert_eq!(t.slice(1..), [2, 3]);
    assert_eq!(t.slice(..), [1, 2, 3]);
    assert_eq!(t.slice(3..), Vec::<i32>::new());
    // from the end
    assert_eq!(t.slice(t.len().saturating_sub(2)..), [2, 3]);
    assert_eq!(t.slice(..t.len() - 1), [1, 2]);
}

#[test]
fn full_coverage_round_trip() {
    let t = SwizzledTupleType::builder("V", "x y z").arrangement("z x y z").build().unwrap();
    let v = t.new([1, 2, 3]).unwrap();
    let values = v.field_values();
    assert_eq!(values, [1, 2, 3]);
    assert_eq!(v.rebuild_from(values).unwrap(), v);
}

#[test]
fn slice_closure() {
    let t = SwizzledTupleType::builder("V", "x y z").arrangement("z x y z").build().unwrap();
    let v = t.new([1, 2, 3]).unwrap();
    for (start, end) in [(0, 4), (1, 3), (2, 4), (0, 1)] {
        let s: SwizzledTuple<i32> = v.slice(start..end);
        assert_eq!(s.type_name(), "V");
        assert_eq!(s.arrangement(), &v.arrangement()[start..end]);
        for field in s.fields() {
            assert!(s.arrangement().contains(field));
        }
        assert_eq!(s.as_slice(), &v.as_slice()[start..end]);
    }

    // slices are swizzlable over their own fields
    assert_eq!(v.slice(1..4).swizzle("zyx").unwrap().as_slice(), [3, 2, 1]);
    let whole = v.slice(0..4);
    assert_eq!(whole.fields(), ["z", "x", "y"]);
    assert_eq!(whole.swizzle("zz").unwrap().as_slice(), [3, 3]);
    assert!(v.slice(0..2).swizzle("zy").unwrap_err().is_unknown_attribute());
}

#[test]
fn shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Swizzler>();
    assert_send_sync::<SwizzledTuple<i32>>();
    assert_send_sync::<SwizzledTupleType<String>>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let t = swizzledtuple("Threaded", "x y").unwrap().new([i, i + 1]).unwrap();
                t.swizzle("yx").unwrap().into_tuple().unwrap()
            })
        })
        .collect();
    let layouts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().layout().clone()).collect();
    assert!(layouts.windows(2).all(|w| std::sync::Arc::ptr_eq(&w[0], &w[1])));
}
