/// Defines a skill struct together with the fields and trait
/// implementations required by [`StrainDecaySkill`].
///
/// Fields without default value become arguments of the generated `new`
/// function. The skill itself must provide the inherent constants
/// `SKILL_MULTIPLIER` and `STRAIN_DECAY_BASE` as well as the method
/// `strain_value_of`. An inherent `difficulty_value` function takes priority
/// over the trait's default.
///
/// [`StrainDecaySkill`]: crate::any::difficulty::skills::StrainDecaySkill
macro_rules! define_skill {
    (
        $( #[$meta:meta] )*
        $vis:vis struct $skill:ident: StrainDecaySkill => $objects:ty[$object:ty] {
            $( $field_name:ident: $field_type:ty $( = $field_default:expr )?, )*
        }
    ) => {
        define_skill! {
            @$objects[$object]
            fields {
                $( $field_name $field_type $( = $field_default )?, )*
                strain_decay_skill_current_strain f64 = 0.0,
                strain_skill_current_section_peak f64 = 0.0,
                strain_skill_current_section_end f64 = 0.0,
                strain_skill_strain_peaks crate::util::strains_vec::StrainsVec
                    = crate::util::strains_vec::StrainsVec::with_capacity(256),
            }
            struct { $( #[$meta] )* $vis $skill }
            new {
                args {}
                assigns {}
            }
        }
    };

    // Field without default
    (
        @$objects:ty[$object:ty]
        fields {
            $field_name:ident $field_type:ty,
            $( $fields:tt )*
        }
        struct { $( $struct:tt )* }
        new {
            args { $( $args:tt )* }
            assigns { $( $assigns:tt )* }
        }
    ) => {
        define_skill! {
            @$objects[$object]
            fields { $( $fields )* }
            struct { $( $struct )* $field_name $field_type, }
            new {
                args { $( $args )* $field_name $field_type, }
                assigns { $( $assigns )* $field_name, }
            }
        }
    };

    // Field with default
    (
        @$objects:ty[$object:ty]
        fields {
            $field_name:ident $field_type:ty = $field_default:expr,
            $( $fields:tt )*
        }
        struct { $( $struct:tt )* }
        new {
            args { $( $args:tt )* }
            assigns { $( $assigns:tt )* }
        }
    ) => {
        define_skill! {
            @$objects[$object]
            fields { $( $fields )* }
            struct { $( $struct )* $field_name $field_type, }
            new {
                args { $( $args )* }
                assigns { $( $assigns )* $field_name $field_default, }
            }
        }
    };

    // Final output
    (
        @$objects:ty[$object:ty]
        fields {}
        struct {
            $( #[$meta:meta] )*
            $vis:vis $name:ident
            $( $field_name:ident $field_type:ty, )*
        }
        new {
            args { $( $arg_name:ident $arg_type:ty, )* }
            assigns { $( $assign_name:ident $( $assign_expr:expr )?, )* }
        }
    ) => {
        $( #[$meta] )*
        $vis struct $name {
            $( $field_name: $field_type, )*
        }

        impl $name {
            #[allow(unused)]
            $vis fn new( $( $arg_name: $arg_type, )* ) -> Self {
                Self {
                    $( $assign_name $( : $assign_expr )?, )*
                }
            }
        }

        const _: () = {
            use crate::{
                any::difficulty::skills::{StrainDecaySkill, StrainSkill},
                util::strains_vec::StrainsVec,
            };

            impl StrainSkill for $name {
                type DifficultyObject<'a> = $object;
                type DifficultyObjects<'a> = $objects;

                fn process<'a>(
                    &mut self,
                    curr: &Self::DifficultyObject<'a>,
                    objects: &Self::DifficultyObjects<'a>,
                ) {
                    let section_length = f64::from(Self::SECTION_LENGTH);

                    // The first object doesn't generate a strain so we
                    // begin with an incremented section end
                    if curr.idx == 0 {
                        self.strain_skill_current_section_end =
                            f64::ceil(curr.start_time / section_length) * section_length;
                    }

                    while curr.start_time > self.strain_skill_current_section_end {
                        self.save_current_peak();
                        self.start_new_section();
                        self.strain_skill_current_section_end += section_length;
                    }

                    let strain = self.strain_value_at(curr, objects);
                    self.strain_skill_current_section_peak =
                        f64::max(strain, self.strain_skill_current_section_peak);
                }

                fn save_current_peak(&mut self) {
                    self.strain_skill_strain_peaks
                        .push(self.strain_skill_current_section_peak);
                }

                fn start_new_section(&mut self) {
                    self.strain_skill_current_section_peak = self.calculate_initial_strain();
                }

                fn current_strain_peaks(&self) -> StrainsVec {
                    Self::get_current_strain_peaks(
                        self.strain_skill_strain_peaks.clone(),
                        self.strain_skill_current_section_peak,
                    )
                }

                fn difficulty_value(current_strain_peaks: StrainsVec) -> f64 {
                    crate::any::difficulty::skills::difficulty_value(
                        current_strain_peaks,
                        Self::DECAY_WEIGHT,
                    )
                }

                fn into_difficulty_value(self) -> f64 {
                    Self::difficulty_value(Self::get_current_strain_peaks(
                        self.strain_skill_strain_peaks,
                        self.strain_skill_current_section_peak,
                    ))
                }

                fn cloned_difficulty_value(&self) -> f64 {
                    Self::difficulty_value(self.current_strain_peaks())
                }
            }

            impl StrainDecaySkill for $name {
                // Decay towards the section boundary is not applied, it only
                // happens once the next object is processed
                fn calculate_initial_strain(&self) -> f64 {
                    self.strain_decay_skill_current_strain
                }

                fn strain_value_at<'a>(
                    &mut self,
                    curr: &Self::DifficultyObject<'a>,
                    objects: &Self::DifficultyObjects<'a>,
                ) -> f64 {
                    self.strain_decay_skill_current_strain *= Self::strain_decay(curr.delta_time);
                    self.strain_decay_skill_current_strain +=
                        self.strain_value_of(curr, objects) * Self::SKILL_MULTIPLIER;

                    self.strain_decay_skill_current_strain
                }

                fn strain_decay(ms: f64) -> f64 {
                    crate::any::difficulty::skills::strain_decay(ms, Self::STRAIN_DECAY_BASE)
                }
            }
        };
    };
}
