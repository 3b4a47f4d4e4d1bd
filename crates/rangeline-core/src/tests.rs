#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::Rect;
    use crate::Vec2;
    use crate::animation::*;
    use crate::dispatch::*;
    use crate::effects::*;
    use crate::error::*;
    use crate::input::*;
    use crate::signal::*;
    use web_time::Duration;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription_and_unsubscribe() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        assert!(sig.unsubscribe(id));
        sig.set(7);

        assert_eq!(*seen.borrow(), vec![42]);
        assert!(!sig.unsubscribe(id));
    }

    #[test]
    fn test_signal_subscriber_can_read() {
        let sig = signal(1);
        let mirrored = Rc::new(RefCell::new(0));

        let sig_clone = sig.clone();
        let mirrored_clone = mirrored.clone();
        sig.subscribe(move |_| *mirrored_clone.borrow_mut() = sig_clone.get() * 10);

        sig.set(3);
        assert_eq!(*mirrored.borrow(), 30);
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let d = Dispose::new(move || *count_clone.borrow_mut() += 1);

        assert!(!d.is_disposed());
        d.run();
        d.clone().run();
        assert!(d.is_disposed());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let dispatcher = PointerDispatcher::new();
        let hits = Rc::new(RefCell::new(0));

        {
            let hits = hits.clone();
            let _sub = dispatcher.subscribe(move |_| *hits.borrow_mut() += 1);
            assert_eq!(dispatcher.listener_count(), 1);
            dispatcher.dispatch(&PointerEvent::moved(Vec2::new(1.0, 0.0)));
        }

        assert_eq!(dispatcher.listener_count(), 0);
        dispatcher.dispatch(&PointerEvent::moved(Vec2::new(2.0, 0.0)));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself_during_dispatch() {
        let dispatcher = PointerDispatcher::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(RefCell::new(0));

        let sub = {
            let slot = slot.clone();
            let hits = hits.clone();
            dispatcher.subscribe(move |pe| {
                *hits.borrow_mut() += 1;
                if pe.is_release() {
                    // Guard is dropped outside the borrow.
                    let taken = slot.borrow_mut().take();
                    drop(taken);
                }
            })
        };
        *slot.borrow_mut() = Some(sub);

        dispatcher.dispatch(&PointerEvent::moved(Vec2::new(1.0, 0.0)));
        dispatcher.dispatch(&PointerEvent::up(Vec2::new(1.0, 0.0)));
        dispatcher.dispatch(&PointerEvent::moved(Vec2::new(3.0, 0.0)));

        assert_eq!(*hits.borrow(), 2);
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn test_listener_removed_mid_dispatch_is_skipped() {
        let dispatcher = PointerDispatcher::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let first = {
            let order = order.clone();
            let victim = victim.clone();
            dispatcher.subscribe(move |_| {
                order.borrow_mut().push("first");
                let taken = victim.borrow_mut().take();
                drop(taken);
            })
        };
        let second = {
            let order = order.clone();
            dispatcher.subscribe(move |_| order.borrow_mut().push("second"))
        };
        *victim.borrow_mut() = Some(second);

        dispatcher.dispatch(&PointerEvent::moved(Vec2::default()));
        assert_eq!(*order.borrow(), vec!["first"]);
        assert!(first.is_active());
    }

    #[test]
    fn test_subscription_outliving_dispatcher() {
        let dispatcher = PointerDispatcher::new();
        let sub = dispatcher.subscribe(|_| {});
        drop(dispatcher);
        sub.unsubscribe();
    }

    #[test]
    fn test_pointer_event_helpers() {
        let p = Vec2::new(4.0, 2.0);
        assert!(PointerEvent::up(p).is_release());
        assert!(PointerEvent::cancel(p).is_release());
        assert!(!PointerEvent::down(p).is_release());
        assert!(PointerEvent::moved(p).is_move());

        let pen = PointerEvent::down(p)
            .with_id(PointerId(3))
            .with_kind(PointerKind::Pen);
        assert_eq!(pen.id, PointerId(3));
        assert_eq!(pen.kind, PointerKind::Pen);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.inflate(5.0), Rect::new(5.0, 5.0, 110.0, 60.0));
        assert!(rect.inflate(5.0).contains(Vec2 { x: 50.0, y: 62.0 }));
        assert_eq!(rect.center_y(), 35.0);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = Rc::new(TestClock::new());

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
            clock.clone(),
        );
        a.set_target(10.0);

        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_animation_delay_and_snap() {
        let clock = Rc::new(TestClock::new());
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear)
            .with_delay(Duration::from_millis(50));
        let mut a = AnimatedValue::new(1.0f64, spec, clock.clone());

        a.set_target(2.0);
        clock.advance(Duration::from_millis(40));
        assert!(a.update());
        assert_eq!(*a.get(), 1.0);

        a.snap_to(5.0);
        assert!(!a.is_animating());
        assert!(!a.update());
        assert_eq!(*a.get(), 5.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(e.interpolate(0.0), 0.0);
            assert_eq!(e.interpolate(1.0), 1.0);
        }
        assert_eq!(Easing::EaseOut.interpolate(0.5), 0.75);
    }

    #[test]
    fn test_config_error_messages() {
        let e = ConfigError::EmptyDomain { min: 5.0, max: 5.0 };
        assert_eq!(e.to_string(), "domain max (5) must be greater than min (5)");
        assert_eq!(
            ConfigError::NonPositiveStep(-1.0).to_string(),
            "step must be positive, got -1"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_animation_spec_serde() {
        let spec = AnimationSpec::default();
        let json = serde_json::to_string(&spec).unwrap();
        let back: AnimationSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
