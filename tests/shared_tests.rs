#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod shared_tests {
    use elemtree::{Element, Render, SharedElement};
    use std::thread;

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let root = SharedElement::new(Element::container("ul"));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let root = root.clone();
                thread::spawn(move || {
                    for item in 0..25 {
                        let mut li = Element::container("li");
                        li.set_attribute("data-worker", worker.to_string()).unwrap();
                        li.append_child(Element::text(item.to_string())).unwrap();
                        root.append_child(li).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let tree = root.into_inner();
        assert_eq!(tree.children().len(), 200);
        assert!(tree.children().iter().all(|child| child.tag_name() == Some("li")));
    }

    #[test]
    fn test_render_sees_whole_children() {
        let root = SharedElement::new(Element::container("div"));
        let writer = {
            let root = root.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    root.append_child(Element::text("x")).unwrap();
                }
            })
        };

        for _ in 0..50 {
            let markup = root.render();
            assert!(markup.starts_with("<div >"));
            assert!(markup.ends_with("</div>"));
        }

        writer.join().unwrap();
        let expected = format!("<div >{}</div>", "x".repeat(100));
        assert_eq!(root.render(), expected);
        assert_eq!(root.snapshot().render(), expected);
    }

    #[test]
    fn test_element_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Element>();
        assert_send_sync::<SharedElement>();
    }
}
