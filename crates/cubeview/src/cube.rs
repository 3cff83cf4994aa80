use std::f64::consts::FRAC_PI_2;

use cubemath::{Float, Matrix3, Vector2, Vector3};
use cubepuzzle::{CubeError, CubeState, Face, LogicalFace, Slice, SliceRequest, scramble};
use cubeprefs::{DEFAULT_PREFS, Preferences};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use web_time::Duration;

use crate::geometry::GeometryCache;
use crate::{
    AnimationKind, AnimationQueue, DragKind, Frame, Geometry, LogicalFaces, PartialTurn, Pick,
    SubFace, Tick, TwistDrag, VertexRef, Viewport,
};

/// How [`RubikCube::shuffle()`] applies its random rotations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShuffleMode {
    /// Apply every rotation right away.
    #[default]
    Immediate,
    /// Apply one rotation per call to [`RubikCube::advance()`], without
    /// animating it.
    PerTick,
    /// Queue every rotation as an animation.
    Animated,
}

#[derive(Debug, Clone)]
enum DragState {
    Twist { start: Vector2, gesture: TwistDrag },
    Look { last: Vector2 },
}

/// Interactive cube: state, view orientation, animation queue, and undo
/// history.
#[derive(Debug, Clone)]
pub struct RubikCube {
    state: CubeState,
    /// Model space to view space.
    matrix: Matrix3,
    cache: GeometryCache,

    animations: AnimationQueue,
    /// Slice currently drawn partway through its rotation.
    turn: Option<PartialTurn>,
    /// Inverses of committed rotations, most recent last.
    undo_stack: Vec<Slice>,
    /// Random rotations still to be applied by [`ShuffleMode::PerTick`].
    pending_shuffle: usize,
    rng: ChaCha12Rng,

    drag: Option<DragState>,
    needs_redraw: bool,

    prefs: Preferences,
}

impl RubikCube {
    /// Constructs a solved cube in its initial orientation.
    pub fn new(prefs: &Preferences) -> Result<Self, CubeError> {
        let mut ret = Self {
            state: CubeState::new_solved(prefs.cube.size)?,
            matrix: Matrix3::IDENT,
            cache: GeometryCache::default(),

            animations: AnimationQueue::default(),
            turn: None,
            undo_stack: vec![],
            pending_shuffle: 0,
            rng: ChaCha12Rng::seed_from_u64(rand::rng().random()),

            drag: None,
            needs_redraw: true,

            prefs: prefs.clone(),
        };
        ret.reset_orientation();
        Ok(ret)
    }

    /// Constructs a solved cube of size `size` with default preferences.
    pub fn with_size(size: usize) -> Result<Self, CubeError> {
        let mut prefs = DEFAULT_PREFS.clone();
        prefs.cube.size = size;
        Self::new(&prefs)
    }

    /// Restores the solved state and discards all queued animations, pending
    /// shuffles, and undo history. The orientation is kept.
    pub fn reset(&mut self, size: usize) -> Result<(), CubeError> {
        self.state = CubeState::new_solved(size)?;
        self.prefs.cube.size = size;
        self.animations.clear();
        self.undo_stack.clear();
        self.pending_shuffle = 0;
        self.drag = None;
        self.set_turn(None);
        log::debug!("reset cube to size {size}");
        Ok(())
    }

    /// Returns the current preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Applies new preferences. Changing the cube size resets the cube.
    /// Preferences that fail [`Preferences::validate()`] are rejected and
    /// the current ones are kept.
    pub fn set_preferences(&mut self, prefs: Preferences) -> eyre::Result<()> {
        prefs.validate()?;
        let size = prefs.cube.size;
        if size != self.size() {
            self.reset(size)?;
        }
        self.prefs = prefs;
        self.invalidate();
        Ok(())
    }

    /// Reseeds the random source used for shuffling.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Returns the cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the number of layers along each axis.
    pub fn size(&self) -> usize {
        self.state.size()
    }
    /// Returns the matrix from model space to view space.
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }
    /// Returns the inverses of committed rotations, most recent last.
    pub fn undo_stack(&self) -> &[Slice] {
        &self.undo_stack
    }
    /// Returns the queue of animations.
    pub fn animations(&self) -> &AnimationQueue {
        &self.animations
    }
    /// Returns whether any animation is queued or in progress.
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }
    /// Returns the slice currently drawn partway through its rotation.
    pub fn turn(&self) -> Option<PartialTurn> {
        self.turn
    }

    /// Returns the visual roles of the faces under the current orientation.
    pub fn logical_faces(&self) -> LogicalFaces {
        *self.cache.logical_faces(&self.matrix)
    }
    /// Resolves a logical face to an absolute face.
    pub fn logical_face(&self, logical: LogicalFace) -> Face {
        self.logical_faces().get(logical)
    }

    /// Resolves a request to a validated canonical slice.
    pub fn resolve(&self, request: SliceRequest) -> Result<Slice, CubeError> {
        request.resolve(self.size(), |logical| self.logical_face(logical))
    }

    /// Rotates a slice immediately, returning the canonical slice applied.
    pub fn rotate_slice(
        &mut self,
        request: SliceRequest,
        skip_history: bool,
    ) -> Result<Slice, CubeError> {
        let slice = self.resolve(request)?;
        self.apply(slice, skip_history)
    }

    /// Queues an animated rotation of a slice. Logical faces are resolved
    /// now, against the current orientation.
    pub fn enqueue_rotation(
        &mut self,
        request: SliceRequest,
        skip_history: bool,
    ) -> Result<Slice, CubeError> {
        let slice = self.resolve(request)?;
        self.animations.push(AnimationKind::Slice {
            slice,
            skip_history,
        });
        self.invalidate();
        Ok(slice)
    }

    /// Queues an animated rotation undoing the most recent rotation. Returns
    /// `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(slice) = self.undo_stack.pop() else {
            return false;
        };
        self.animations.push(AnimationKind::Slice {
            slice,
            skip_history: true,
        });
        self.invalidate();
        true
    }

    /// Returns the number of random rotations in a default shuffle.
    pub fn default_shuffle_length(&self) -> usize {
        self.size() * self.size() * 2
    }

    /// Applies `n` uniformly random slice rotations. Each can be undone.
    pub fn shuffle(&mut self, n: usize, mode: ShuffleMode) {
        if n == 0 {
            return;
        }
        log::debug!("shuffling {n} times ({mode:?})");
        let size = self.size();
        match mode {
            ShuffleMode::Immediate => {
                for slice in scramble::random_slices(&mut self.rng, size, n) {
                    self.apply_or_log(slice, false);
                }
            }
            ShuffleMode::PerTick => {
                self.pending_shuffle += n;
                self.invalidate();
            }
            ShuffleMode::Animated => {
                for slice in scramble::random_slices(&mut self.rng, size, n) {
                    self.animations.push(AnimationKind::Slice {
                        slice: slice.canonicalize(size),
                        skip_history: false,
                    });
                }
                self.invalidate();
            }
        }
    }

    /// Advances pending shuffles and the animation at the head of the queue.
    /// Returns whether another tick is needed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.pending_shuffle > 0 {
            self.pending_shuffle -= 1;
            let size = self.size();
            let slice = scramble::random_slice(&mut self.rng, size);
            self.apply_or_log(slice, false);
        }

        let duration = self.prefs.animation.twist_duration();
        match self.animations.proceed(delta, duration) {
            Tick::Idle | Tick::Started(_) => (),
            Tick::InProgress {
                kind: AnimationKind::Slice { slice, .. },
                phase,
            } => {
                let t = self.prefs.animation.twist_easing.ease(phase) as Float;
                let direction = if slice.clockwise { 1.0 } else { -1.0 };
                let angle = t * FRAC_PI_2 * direction;
                self.set_turn(Some(PartialTurn { slice, angle }));
            }
            Tick::Completed(AnimationKind::Slice {
                slice,
                skip_history,
            }) => {
                self.set_turn(None);
                self.apply_or_log(slice, skip_history);
            }
        }

        self.pending_shuffle > 0 || self.is_animating()
    }

    fn apply(&mut self, slice: Slice, skip_history: bool) -> Result<Slice, CubeError> {
        let applied = self.state.rotate(slice)?;
        if !skip_history {
            self.undo_stack.push(applied.rev());
        }
        self.cache.invalidate_turn();
        self.invalidate();
        Ok(applied)
    }

    fn apply_or_log(&mut self, slice: Slice, skip_history: bool) {
        if let Err(e) = self.apply(slice, skip_history) {
            log::error!("error applying slice {slice}: {e}");
        }
    }

    fn set_turn(&mut self, turn: Option<PartialTurn>) {
        self.turn = turn;
        self.cache.invalidate_turn();
        self.invalidate();
    }

    /// Overrides the partial turn, bypassing the animation queue.
    #[cfg(test)]
    pub(crate) fn set_partial_turn(&mut self, turn: Option<PartialTurn>) {
        self.set_turn(turn);
    }

    /// Restores the initial orientation from the view preferences.
    pub fn reset_orientation(&mut self) {
        let view = &self.prefs.view;
        let (yaw, pitch) = (view.initial_yaw as Float, view.initial_pitch as Float);
        self.set_matrix(Matrix3::IDENT);
        self.rotate_view(yaw, pitch);
    }

    /// Replaces the view orientation.
    pub fn set_matrix(&mut self, matrix: Matrix3) {
        self.matrix = matrix;
        self.cache.invalidate_orientation();
        self.invalidate();
    }

    /// Rotates the view about the screen axes: horizontally by `dx` radians,
    /// then vertically by `dy` radians.
    pub fn rotate_view(&mut self, dx: Float, dy: Float) {
        let m = Matrix3::from_yaw(dx) * self.matrix;
        let m = Matrix3::from_pitch(dy) * m;
        self.set_matrix(m.renormalized());
    }

    /// Rotates the view about the cube's own axes: horizontal motion spins the
    /// cube about its downward face and vertical motion tumbles it about its
    /// leftward face. Only the larger component of the motion is used.
    pub fn rotate_view_smart(&mut self, dx: Float, dy: Float) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let (logical, angle) = match dx.abs() > dy.abs() {
            true => (LogicalFace::Down, dx),
            false => (LogicalFace::Left, dy),
        };
        let axis = self.matrix * self.logical_face(logical).normal();
        let m = Matrix3::from_axis_angle(axis, angle) * self.matrix;
        self.set_matrix(m.renormalized());
    }

    /// Returns the view-dependent geometry for the current orientation and
    /// partial turn.
    pub fn geometry(&self) -> &Geometry {
        self.cache.geometry(self.size(), &self.matrix, self.turn)
    }

    /// Returns the view-space outward normal of a sub-face.
    pub fn face_normal(&self, sub: SubFace) -> Vector3 {
        self.geometry().normal(sub)
    }
    /// Returns the number of elements drawn on a sub-face.
    pub fn element_count(&self, sub: SubFace) -> usize {
        self.geometry().element_count(sub)
    }
    /// Returns the view-space position of a vertex of an element of a
    /// sub-face.
    pub fn element_vertex(&self, sub: SubFace, element: usize, vertex: VertexRef) -> Vector3 {
        self.geometry().element_vertex(sub, element, vertex)
    }
    /// Returns the drawing rank of a sub-face, or `None` if it is hidden.
    pub fn z_order(&self, sub: SubFace) -> Option<i32> {
        self.geometry().z_order(sub)
    }

    /// Returns the element under a point in normalized view coordinates.
    pub fn pick(&self, x: Float, y: Float) -> Option<Pick> {
        self.geometry().pick(Vector2::new(x, y))
    }
    /// Returns the element under a pixel.
    pub fn pick_pixel(&self, x: Float, y: Float, viewport: &Viewport) -> Option<Pick> {
        self.geometry().pick(viewport.normalize(Vector2::new(x, y)))
    }

    /// Returns a viewport of the given pixel size, zoomed per the view
    /// preferences.
    pub fn viewport(&self, width: Float, height: Float) -> Viewport {
        Viewport::new(width, height, self.prefs.view.zoom as Float)
    }

    /// Returns everything needed to draw the cube.
    pub fn frame(&self, viewport: &Viewport) -> Frame {
        self.geometry()
            .frame(|face, e| self.state.get(face, e), viewport, &self.prefs.style)
    }

    /// Starts a pointer drag at pixel position `pixel`. Returns whether a drag
    /// started.
    ///
    /// Twist drags start only on a sticker, and only while no animation is
    /// queued.
    pub fn drag_start(&mut self, kind: DragKind, pixel: Vector2, viewport: &Viewport) -> bool {
        self.drag = match kind {
            DragKind::Look => Some(DragState::Look { last: pixel }),
            DragKind::Twist if self.is_animating() => None,
            DragKind::Twist => self
                .pick_pixel(pixel.x, pixel.y, viewport)
                .map(|pick| DragState::Twist {
                    start: pixel,
                    gesture: TwistDrag::new(self.geometry(), pick),
                }),
        };
        self.drag.is_some()
    }

    /// Continues a pointer drag. A twist drag that has traveled far enough
    /// queues its rotation and ends.
    pub fn drag_move(&mut self, pixel: Vector2) {
        match self.drag.take() {
            None => (),
            Some(DragState::Look { last }) => {
                let sensitivity = self.prefs.interaction.look_sensitivity as Float;
                let delta = (pixel - last) * sensitivity;
                match self.prefs.interaction.smart_rotation {
                    true => self.rotate_view_smart(delta.x, delta.y),
                    false => self.rotate_view(delta.x, delta.y),
                }
                self.drag = Some(DragState::Look { last: pixel });
            }
            Some(DragState::Twist { start, gesture }) => {
                let threshold = self.prefs.interaction.twist_drag_threshold as Float;
                match gesture.select(pixel - start, threshold) {
                    Some(slice) => {
                        if let Err(e) = self.enqueue_rotation(slice.into(), false) {
                            log::error!("error queueing dragged slice {slice}: {e}");
                        }
                    }
                    None => self.drag = Some(DragState::Twist { start, gesture }),
                }
            }
        }
    }

    /// Ends a pointer drag.
    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// Returns whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Requests that the cube be redrawn.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }
    /// Returns whether a redraw was requested since the last call, and clears
    /// the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
